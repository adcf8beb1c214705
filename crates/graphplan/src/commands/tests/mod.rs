mod plan_cmd_tests;
