mod extraction_mode_test;
mod extractor_config_test;
mod parsed_document_test;
