mod class;
mod student;
mod violation;
