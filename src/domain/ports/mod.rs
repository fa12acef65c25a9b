pub mod snowflake_source;
