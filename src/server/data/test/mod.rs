mod catalog;
mod trip;
