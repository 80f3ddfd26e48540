mod connectives_tests;
mod groups_tests;
mod terms_tests;
