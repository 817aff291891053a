pub mod csv_series_repository_impl;
