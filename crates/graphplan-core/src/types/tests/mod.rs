mod graphql_type_tests;
