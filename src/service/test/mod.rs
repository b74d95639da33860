mod student;
mod violation;
