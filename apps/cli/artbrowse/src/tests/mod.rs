mod command;
mod logger;
mod terminal;
