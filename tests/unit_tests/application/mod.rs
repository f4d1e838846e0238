mod extraction_error_test;
