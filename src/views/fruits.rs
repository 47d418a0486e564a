use super::{escape, layout};
use crate::domain::Fruit;

fn display_name(fruit: &Fruit) -> String {
    escape(fruit.fruit_name.as_deref().unwrap_or(""))
}

fn checked(fruit: Option<&Fruit>) -> &'static str {
    match fruit {
        Some(f) if f.is_ready_to_eat => " checked",
        _ => "",
    }
}

/// Shared by the new and edit pages; `action` already carries any `_method` override.
fn fruit_form(action: &str, fruit: Option<&Fruit>, submit: &str) -> String {
    let name = fruit.map(display_name).unwrap_or_default();
    format!(
        "<form action=\"{}\" method=\"POST\">\n\
         <label for=\"fruitName\">Name:</label>\n\
         <input type=\"text\" name=\"fruitName\" id=\"fruitName\" value=\"{}\" />\n\
         <label for=\"isReadyToEat\">Ready to eat?</label>\n\
         <input type=\"checkbox\" name=\"isReadyToEat\" id=\"isReadyToEat\"{} />\n\
         <button type=\"submit\">{}</button>\n\
         </form>",
        escape(action),
        name,
        checked(fruit),
        escape(submit)
    )
}

pub fn index_page(fruits: &[Fruit]) -> String {
    let items: String = fruits
        .iter()
        .map(|fruit| {
            format!(
                "<li><a href=\"/fruits/{}\">{}</a>{}</li>\n",
                fruit.id,
                display_name(fruit),
                if fruit.is_ready_to_eat {
                    " (ready to eat)"
                } else {
                    ""
                }
            )
        })
        .collect();
    let body = format!(
        "<h1>All Fruits</h1>\n<ul>\n{}</ul>\n<a href=\"/fruits/new\">Add a new fruit</a>",
        items
    );
    layout("All Fruits", &body)
}

pub fn new_page() -> String {
    let body = format!(
        "<h1>Create a new fruit!</h1>\n{}",
        fruit_form("/fruits", None, "Add Fruit")
    );
    layout("New Fruit", &body)
}

pub fn show_page(fruit: &Fruit) -> String {
    let verdict = if fruit.is_ready_to_eat {
        "Ready to eat!"
    } else {
        "Not ready to eat yet."
    };
    let body = format!(
        "<h1>{name}</h1>\n\
         <p>{verdict}</p>\n\
         <a href=\"/fruits/{id}/edit\">Edit {name}</a>\n\
         <form action=\"/fruits/{id}?_method=DELETE\" method=\"POST\">\n\
         <button type=\"submit\">Delete {name}</button>\n\
         </form>\n\
         <a href=\"/fruits\">Back to all fruits</a>",
        name = display_name(fruit),
        verdict = verdict,
        id = fruit.id,
    );
    layout("Fruit", &body)
}

pub fn edit_page(fruit: &Fruit) -> String {
    let action = format!("/fruits/{}?_method=PUT", fruit.id);
    let body = format!(
        "<h1>Edit {}</h1>\n{}",
        display_name(fruit),
        fruit_form(&action, Some(fruit), "Update Fruit")
    );
    layout("Edit Fruit", &body)
}
