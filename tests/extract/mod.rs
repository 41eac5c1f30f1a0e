mod tests_pathways;
mod tests_properties;
mod tests_tables;
