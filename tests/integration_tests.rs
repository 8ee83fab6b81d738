// Integration tests for component-readme

mod integration {
    mod cli_test;
    mod collector_test;
    mod extraction_test;
    mod language_test;
}
