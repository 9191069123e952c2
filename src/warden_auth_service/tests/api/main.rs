mod helpers;
mod register;
