mod page;
mod record;
