mod tests_write_table;
