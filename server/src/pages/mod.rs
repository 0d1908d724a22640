//! Server-rendered HTML for the single recipe page.

mod html;

pub use html::escape;

use crate::error::SubmitError;
use crate::models::Recipe;
use recipe_board_core::RecipeInput;
use std::fmt::Write;

/// Everything the index page shows.
#[derive(Debug, Default)]
pub struct IndexPage {
    pub recipes: Vec<Recipe>,
    pub errors: Vec<SubmitError>,
    /// Values echoed into the create form.
    pub form: RecipeInput,
    /// An edit that failed validation: recipe id and the submitted values.
    pub editing: Option<(i32, RecipeInput)>,
    pub db_ready: bool,
    pub port: u16,
    pub debug: bool,
}

impl IndexPage {
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str(html::HEAD);
        out.push_str("<h1>レシピ投稿</h1>\n");

        if !self.db_ready {
            out.push_str(
                "<p class=\"banner\">Database not configured: set DATABASE_URL to save recipes.</p>\n",
            );
        }

        if !self.errors.is_empty() {
            out.push_str("<ul class=\"errors\">\n");
            for error in &self.errors {
                let _ = writeln!(out, "  <li>{}</li>", escape(&error.to_string()));
            }
            out.push_str("</ul>\n");
        }

        self.render_create_form(&mut out);
        self.render_recipes(&mut out);

        let _ = writeln!(
            out,
            "<footer>database: {} | port: {} | debug: {}</footer>",
            if self.db_ready { "ready" } else { "not configured" },
            self.port,
            if self.debug { "on" } else { "off" },
        );
        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_create_form(&self, out: &mut String) {
        let _ = write!(
            out,
            concat!(
                "<form method=\"post\" action=\"/\" class=\"create\">\n",
                "  <input type=\"hidden\" name=\"_action\" value=\"create\">\n",
                "  <label>Title <input name=\"title\" maxlength=\"200\" value=\"{title}\"></label>\n",
                "  <label>Minutes <input name=\"minutes\" inputmode=\"numeric\" value=\"{minutes}\"></label>\n",
                "  <label>Description <textarea name=\"description\">{description}</textarea></label>\n",
                "  <button type=\"submit\">Post</button>\n",
                "</form>\n",
            ),
            title = escape(&self.form.title),
            minutes = escape(&self.form.minutes),
            description = escape(&self.form.description),
        );
    }

    fn render_recipes(&self, out: &mut String) {
        if self.recipes.is_empty() {
            out.push_str("<p class=\"empty\">No recipes yet.</p>\n");
            return;
        }

        out.push_str("<ul class=\"recipes\">\n");
        for recipe in &self.recipes {
            let _ = writeln!(
                out,
                "  <li id=\"recipe-{id}\">\n    <h2>{title}</h2>\n    <p class=\"minutes\">{minutes} min</p>",
                id = recipe.id,
                title = escape(&recipe.title),
                minutes = recipe.minutes,
            );
            if let Some(description) = &recipe.description {
                let _ = writeln!(out, "    <p class=\"description\">{}</p>", escape(description));
            }
            let _ = writeln!(
                out,
                "    <time datetime=\"{ts}\">{shown}</time>",
                ts = recipe.created_at.to_rfc3339(),
                shown = recipe.created_at.format("%Y-%m-%d %H:%M"),
            );

            let edit_values = match &self.editing {
                Some((id, input)) if *id == recipe.id => input.clone(),
                _ => RecipeInput::new(
                    recipe.title.clone(),
                    recipe.minutes.to_string(),
                    recipe.description.clone().unwrap_or_default(),
                ),
            };
            render_edit_form(out, recipe.id, &edit_values);

            let _ = writeln!(
                out,
                concat!(
                    "    <form method=\"post\" action=\"/delete/{id}\" class=\"delete\">",
                    "<button type=\"submit\">Delete</button></form>\n",
                    "  </li>",
                ),
                id = recipe.id,
            );
        }
        out.push_str("</ul>\n");
    }
}

fn render_edit_form(out: &mut String, id: i32, values: &RecipeInput) {
    let _ = write!(
        out,
        concat!(
            "    <form method=\"post\" action=\"/edit/{id}\" class=\"edit\">\n",
            "      <input name=\"edit_title\" maxlength=\"200\" value=\"{title}\">\n",
            "      <input name=\"edit_minutes\" inputmode=\"numeric\" value=\"{minutes}\">\n",
            "      <textarea name=\"edit_description\">{description}</textarea>\n",
            "      <button type=\"submit\">Save</button>\n",
            "    </form>\n",
        ),
        id = id,
        title = escape(&values.title),
        minutes = escape(&values.minutes),
        description = escape(&values.description),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use recipe_board_core::FieldError;

    fn recipe(id: i32, title: &str, description: Option<&str>) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            minutes: 10,
            description: description.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_banner_only_without_database() {
        let page = IndexPage::default().render();
        assert!(page.contains("Database not configured"));

        let page = IndexPage {
            db_ready: true,
            ..Default::default()
        }
        .render();
        assert!(!page.contains("Database not configured"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let page = IndexPage {
            recipes: vec![recipe(1, "<script>alert(1)</script>", Some("a & b"))],
            form: RecipeInput::new("\"quoted\"", "", ""),
            db_ready: true,
            ..Default::default()
        }
        .render();

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(page.contains("a &amp; b"));
        assert!(page.contains("value=\"&quot;quoted&quot;\""));
    }

    #[test]
    fn test_errors_are_listed() {
        let page = IndexPage {
            errors: vec![
                SubmitError::from(FieldError::TitleRequired),
                SubmitError::SaveFailed,
            ],
            ..Default::default()
        }
        .render();

        assert!(page.contains("<li>title is required</li>"));
        assert!(page.contains("<li>an error occurred while saving</li>"));
    }

    #[test]
    fn test_failed_edit_is_echoed_into_its_form() {
        let page = IndexPage {
            recipes: vec![recipe(1, "卵焼き", None), recipe(2, "味噌汁", None)],
            editing: Some((2, RecipeInput::new("", "abc", ""))),
            db_ready: true,
            ..Default::default()
        }
        .render();

        assert!(page.contains("name=\"edit_title\" maxlength=\"200\" value=\"卵焼き\""));
        assert!(page.contains("name=\"edit_minutes\" inputmode=\"numeric\" value=\"abc\""));
        assert!(!page.contains("value=\"味噌汁\""));
    }
}
