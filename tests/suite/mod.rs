mod editor_loop;
mod persistence;
mod properties;
