mod fake_test;
