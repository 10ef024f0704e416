pub mod request_unicorn;
