//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! HTML pages served by the webapp
//!
//! Pages are plain strings. Any text coming from the store goes through
//! [`escape`] before it is written.

use super::CHARACTERS_PATH;
use roster_common::Character;
use std::fmt::Write;

pub const LIST_HEADING: &str = "Liste de mes personnages pour mon jeu";
pub const NOT_FOUND_MESSAGE: &str = "Personnage non trouvé";

/// List of every character with a link to its page, followed by the creation form.
pub fn render_character_list(characters: &[Character]) -> String {
    let mut body = String::new();
    body.push_str("<div>\n");
    let _ = writeln!(body, "<h1>{}</h1>", LIST_HEADING);
    body.push_str("<ul>\n");
    for character in characters {
        let _ = writeln!(
            body,
            "<li>{} <a href=\"{}/{}\">Voir</a></li>",
            escape(&character.name),
            CHARACTERS_PATH,
            character.id
        );
    }
    body.push_str("</ul>\n");
    let _ = writeln!(
        body,
        "<form method=\"post\" action=\"{}\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Nom du personnage\">\n\
         <button type=\"submit\">Créer</button>\n\
         </form>",
        CHARACTERS_PATH
    );
    body.push_str("</div>\n");
    page("Personnages", &body)
}

pub fn render_character_detail(character: &Character) -> String {
    let name = escape(&character.name);
    let mut body = String::new();
    body.push_str("<div>\n");
    let _ = writeln!(body, "<h1>{}</h1>", name);
    body.push_str("<ul>\n");
    let _ = writeln!(body, "<li>Attaque: {}</li>", character.attack);
    let _ = writeln!(body, "<li>Défense: {}</li>", character.defense);
    let _ = writeln!(body, "<li>Points de vie: {}</li>", character.health_points);
    let _ = writeln!(body, "<li>Expérience: {}</li>", character.experience);
    body.push_str("</ul>\n");
    body.push_str("</div>\n");
    page(&name, &body)
}

pub fn render_character_not_found() -> String {
    page(
        NOT_FOUND_MESSAGE,
        &format!("<div>{}</div>\n", NOT_FOUND_MESSAGE),
    )
}

pub fn render_internal_error() -> String {
    page(
        "Erreur",
        "<div>Une erreur est survenue, veuillez réessayer plus tard.</div>\n",
    )
}

/// `title` must already be escaped
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"fr\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         {}\
         </body>\n\
         </html>\n",
        title, body
    )
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
