use storefront_core::{Msg, PriceBucket, SortMode};

/// One parsed line of terminal input.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Forward a message into the core update loop.
    Dispatch(Msg),
    /// Reload both resources (`reload` with no argument).
    ReloadAll,
    /// Print the command reference.
    ShowHelp,
    /// Input that parsed to nothing useful; `hint` is shown to the user.
    Unrecognized { hint: String },
    /// Leave the application.
    Quit,
}

/// Parses one input line. Blank lines produce nothing.
pub fn parse(line: &str) -> Option<ShellEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    let event = match command {
        "search" => ShellEvent::Dispatch(Msg::SearchChanged(rest.to_string())),
        "cat" => match rest {
            "" => ShellEvent::Unrecognized {
                hint: "usage: cat <id> to toggle a category, cat all to clear".to_string(),
            },
            "all" => ShellEvent::Dispatch(Msg::CategoryCleared),
            _ => match rest.parse() {
                Ok(id) => ShellEvent::Dispatch(Msg::CategoryToggled(id)),
                Err(_) => ShellEvent::Unrecognized {
                    hint: format!("`{rest}` is not a category id; usage: cat <id>|all"),
                },
            },
        },
        "price" => match PriceBucket::parse(rest) {
            Some(bucket) => ShellEvent::Dispatch(Msg::PriceFilterChanged(bucket)),
            None => ShellEvent::Unrecognized {
                hint: "usage: price all|0-50|50-100|100-500|500+".to_string(),
            },
        },
        "sort" => match SortMode::parse(rest) {
            Some(mode) => ShellEvent::Dispatch(Msg::SortChanged(mode)),
            None => ShellEvent::Unrecognized {
                hint: "usage: sort default|price-asc|price-desc|name-asc|name-desc".to_string(),
            },
        },
        "clear" => ShellEvent::Dispatch(Msg::FiltersCleared),
        "open" => match rest.parse() {
            Ok(id) => ShellEvent::Dispatch(Msg::DetailOpened(id)),
            Err(_) => ShellEvent::Unrecognized {
                hint: "usage: open <product id>".to_string(),
            },
        },
        "close" => ShellEvent::Dispatch(Msg::DetailClosed),
        "reload" => match rest {
            "" => ShellEvent::ReloadAll,
            "products" => ShellEvent::Dispatch(Msg::ProductsRequested),
            "categories" => ShellEvent::Dispatch(Msg::CategoriesRequested),
            _ => ShellEvent::Unrecognized {
                hint: "usage: reload [products|categories]".to_string(),
            },
        },
        "help" | "?" => ShellEvent::ShowHelp,
        "quit" | "exit" => ShellEvent::Quit,
        _ => ShellEvent::Unrecognized {
            hint: format!("unknown command `{command}`; type `help` for the list"),
        },
    };

    Some(event)
}

pub fn usage() -> &'static str {
    "commands:\n\
     \x20 search <text>        filter by title, description, or category\n\
     \x20 search               clear the search text\n\
     \x20 cat <id>             toggle a category chip (cat all clears)\n\
     \x20 price <bucket>       all | 0-50 | 50-100 | 100-500 | 500+\n\
     \x20 sort <mode>          default | price-asc | price-desc | name-asc | name-desc\n\
     \x20 clear                reset every filter\n\
     \x20 open <id>            open a product's detail view\n\
     \x20 close                close the detail view\n\
     \x20 reload               refetch products and categories\n\
     \x20 reload products      refetch products only\n\
     \x20 reload categories    refetch categories only\n\
     \x20 quit                 leave"
}
