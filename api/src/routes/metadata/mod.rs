pub mod metadata_route;
