mod input_value_resolver_tests;
mod variable_value_tests;
