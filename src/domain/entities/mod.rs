pub mod stock_record;
