mod list_query;
mod page;
