
mod index_sync_tests;
