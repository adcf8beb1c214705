mod syntax_tree_tests;
