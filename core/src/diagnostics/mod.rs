pub mod source_map;
