pub mod revisions;
