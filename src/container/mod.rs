pub mod chained_hash_table;
pub mod hash_function;
