//! Server-rendered HTML for the listing, the two submission forms and the error page.

use std::fmt::Write;

use crate::domain::record::{Record, Violations};
use crate::domain::{PetForm, WalkerForm};
use crate::services::Listing;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const NAV: &str = "<nav><a href=\"/\">Home</a> | <a href=\"/walkers/new\">Add walker</a> | \
                   <a href=\"/pets/new\">Add pet</a></nav>";

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - Waqqly</title>\n</head>\n<body>\n{}\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        NAV,
        body
    )
}

fn error_summary(out: &mut String, message: Option<&str>) {
    if let Some(message) = message {
        let _ = writeln!(
            out,
            "<div class=\"error-summary\" role=\"alert\">{}</div>",
            escape(message)
        );
    }
}

fn text_input(
    out: &mut String,
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    violations: Option<&Violations>,
) {
    let _ = writeln!(
        out,
        "<div class=\"field\">\n<label for=\"{name}\">{label}</label>\n\
         <input id=\"{name}\" name=\"{name}\" type=\"{input_type}\" value=\"{value}\">",
        name = name,
        label = escape(label),
        input_type = input_type,
        value = escape(value),
    );
    if let Some(violations) = violations {
        for violation in violations.for_field(name) {
            let _ = writeln!(
                out,
                "<span class=\"field-error\">{}</span>",
                escape(&violation.message)
            );
        }
    }
    out.push_str("</div>\n");
}

fn remove_button(out: &mut String, action: &str, field: &str, id: &str) {
    let _ = write!(
        out,
        "<form method=\"post\" action=\"{}\"><input type=\"hidden\" name=\"{}\" value=\"{}\">\
         <button type=\"submit\">Remove</button></form>",
        action,
        field,
        escape(id)
    );
}

pub fn index_page(listing: &Listing, error: Option<&str>) -> String {
    let mut body = String::new();
    error_summary(&mut body, error);

    body.push_str("<h1>Dog walkers</h1>\n");
    if listing.walkers.is_empty() {
        body.push_str("<p>No walkers registered yet.</p>\n");
    } else {
        body.push_str("<table>\n");
        body.push_str("<tr><th>Name</th><th>Email</th><th>Phone</th><th>Location</th><th></th></tr>\n");
        for walker in &listing.walkers {
            let _ = write!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>",
                escape(walker.name()),
                escape(walker.email()),
                escape(walker.phone()),
                escape(walker.location())
            );
            remove_button(&mut body, "/walkers/remove", "walker_id", walker.id().as_str());
            body.push_str("</td></tr>\n");
        }
        body.push_str("</table>\n");
    }

    body.push_str("<h1>Pets</h1>\n");
    if listing.pets.is_empty() {
        body.push_str("<p>No pets registered yet.</p>\n");
    } else {
        body.push_str("<table>\n");
        body.push_str("<tr><th>Name</th><th>Type</th><th>Age</th><th>Owner</th><th></th></tr>\n");
        for pet in &listing.pets {
            let _ = write!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>",
                escape(pet.name()),
                escape(pet.pet_type()),
                pet.age(),
                escape(pet.owner())
            );
            remove_button(&mut body, "/pets/remove", "pet_id", pet.id().as_str());
            body.push_str("</td></tr>\n");
        }
        body.push_str("</table>\n");
    }

    layout("Home", &body)
}

/// Shown when the listing itself could not be read. Never falls back to the
/// empty-state text.
pub fn listing_unavailable_page(error: &str) -> String {
    let mut body = String::new();
    error_summary(&mut body, Some(error));
    body.push_str("<p>The listing could not be loaded. Please try again later.</p>\n");
    layout("Home", &body)
}

pub fn pet_form_page(
    form: &PetForm,
    violations: Option<&Violations>,
    error: Option<&str>,
) -> String {
    let mut body = String::from("<h1>Add a pet</h1>\n");
    error_summary(&mut body, error);
    body.push_str("<form method=\"post\" action=\"/pets/new\">\n");
    text_input(&mut body, "name", "Name", "text", &form.name, violations);
    text_input(&mut body, "type", "Type", "text", &form.pet_type, violations);
    text_input(&mut body, "age", "Age", "number", &form.age, violations);
    text_input(&mut body, "owner", "Owner", "text", &form.owner, violations);
    body.push_str("<button type=\"submit\">Add pet</button>\n</form>");
    layout("Add pet", &body)
}

pub fn walker_form_page(
    form: &WalkerForm,
    violations: Option<&Violations>,
    error: Option<&str>,
) -> String {
    let mut body = String::from("<h1>Register as a dog walker</h1>\n");
    error_summary(&mut body, error);
    body.push_str("<form method=\"post\" action=\"/walkers/new\">\n");
    text_input(&mut body, "name", "Name", "text", &form.name, violations);
    text_input(&mut body, "email", "Email", "email", &form.email, violations);
    text_input(&mut body, "phone", "Phone", "tel", &form.phone, violations);
    text_input(&mut body, "location", "Location", "text", &form.location, violations);
    body.push_str("<button type=\"submit\">Register</button>\n</form>");
    layout("Add walker", &body)
}

/// `request_id` ties the page to the matching log line.
pub fn error_page(status: u16, message: &str, request_id: Option<&str>) -> String {
    let mut body = format!(
        "<h1 class=\"text-danger\">Error.</h1>\n\
         <h2>An error occurred while processing your request ({}).</h2>\n<p>{}</p>\n",
        status,
        escape(message)
    );
    if let Some(request_id) = request_id {
        let _ = writeln!(
            body,
            "<p><strong>Request ID:</strong> <code>{}</code></p>",
            escape(request_id)
        );
    }
    layout("Error", &body)
}
