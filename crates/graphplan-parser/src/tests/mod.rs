mod graphql_parse_error_tests;
mod graphql_parser_document_tests;
mod graphql_parser_error_tests;
mod graphql_token_stream_tests;
