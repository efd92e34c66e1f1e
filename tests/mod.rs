mod order_api_tests;
mod retry_tests;
