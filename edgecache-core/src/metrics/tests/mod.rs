mod summary_tests;
