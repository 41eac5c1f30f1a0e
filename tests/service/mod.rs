mod tests_drug_count;
