mod registry;
mod resume;
