mod tests_declarations;
mod tests_doxygen;
mod tests_lexer_safeguards;
mod tests_paths;
mod tests_recovery;
mod tests_templates;

#[cfg(feature = "serde")]
mod tests_serde;
