pub mod series_csv;
