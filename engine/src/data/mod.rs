pub mod currency_parser;
