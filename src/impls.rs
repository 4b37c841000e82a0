mod floats;
mod integers;
