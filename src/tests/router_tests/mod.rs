mod listing_tests;
mod page_tests;
