pub mod score_dimension;
pub mod snowflake_scores;
pub mod stock_query;
