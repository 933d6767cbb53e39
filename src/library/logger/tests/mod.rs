mod logger_test;
