mod tests_generator;
