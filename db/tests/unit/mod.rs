mod artists;
mod shows;
