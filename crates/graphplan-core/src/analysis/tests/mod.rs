mod operation_metrics_tests;
