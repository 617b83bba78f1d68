mod add;
mod compare;
mod parse;
mod sub;
