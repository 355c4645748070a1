//! Minimal HTML pages for `?type=html` reads.
//!
//! Every user-supplied string is escaped before it reaches the page.

use corkboard_core::{
  entity::Entity,
  note::Note,
  view::{BoardTree, ColumnTree, Listing, Snapshot},
};

pub fn escape_html(text: &str) -> String {
  text
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}

fn page(title: &str, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n",
    title = escape_html(title),
  )
}

fn link(path: &str, label: &str) -> String {
  format!(
    "<a href=\"{}?type=html\">{}</a>",
    escape_html(path),
    escape_html(label)
  )
}

fn entity_link<E: Entity>(entity: &E) -> String {
  link(&format!("/{}s/{}", E::KIND, entity.id()), entity.name())
}

fn list<E: Entity>(items: &[E]) -> String {
  if items.is_empty() {
    return "<p>(none)</p>\n".to_owned();
  }
  let mut out = String::from("<ul>\n");
  for item in items {
    out.push_str(&format!("<li>{}</li>\n", entity_link(item)));
  }
  out.push_str("</ul>\n");
  out
}

fn note_block(note: &Note) -> String {
  format!(
    "<li>{}<p>{}</p></li>\n",
    entity_link(note),
    escape_html(&note.text)
  )
}

fn column_section(tree: &ColumnTree) -> String {
  let mut out = format!("<section>\n<h2>{}</h2>\n<ul>\n", entity_link(&tree.column));
  for note in &tree.notes {
    out.push_str(&note_block(note));
  }
  out.push_str("</ul>\n</section>\n");
  out
}

// ─── Pages ───────────────────────────────────────────────────────────────────

pub fn index(snapshot: &Snapshot) -> String {
  let mut body = String::from("<h2>Boards</h2>\n");
  body.push_str(&list(&snapshot.boards));
  body.push_str("<h2>Columns</h2>\n");
  body.push_str(&list(&snapshot.columns));
  body.push_str("<h2>Notes</h2>\n");
  body.push_str(&list(&snapshot.notes));
  page("Corkboard", &body)
}

pub fn listing<E: Entity>(title: &str, listing: &Listing<E>) -> String {
  page(title, &list(&listing.items))
}

pub fn board(tree: &BoardTree) -> String {
  let body: String = tree.columns.iter().map(column_section).collect();
  page(&tree.board.name, &body)
}

pub fn column(tree: &ColumnTree) -> String {
  let mut body = String::from("<ul>\n");
  for note in &tree.notes {
    body.push_str(&note_block(note));
  }
  body.push_str("</ul>\n");
  page(&tree.column.name, &body)
}

pub fn note(note: &Note) -> String {
  page(&note.name, &format!("<p>{}</p>\n", escape_html(&note.text)))
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use uuid::Uuid;

  use super::*;

  #[test]
  fn escapes_markup() {
    assert_eq!(
      escape_html(r#"<a href="x">&</a>"#),
      "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
    );
  }

  #[test]
  fn note_page_escapes_name_and_text() {
    let n = Note {
      id:         Uuid::new_v4(),
      name:       "<script>".into(),
      text:       "a & b".into(),
      created_at: Utc::now(),
    };
    let html = note(&n);
    assert!(html.contains("<title>&lt;script&gt;</title>"));
    assert!(html.contains("<p>a &amp; b</p>"));
    assert!(!html.contains("<script>"));
  }
}
