pub mod series_repository;
