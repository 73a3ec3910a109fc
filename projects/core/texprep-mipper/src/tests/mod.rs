mod alpha_tests;
