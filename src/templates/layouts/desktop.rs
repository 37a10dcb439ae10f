use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, signed_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {}
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/" class="logo" { "Stays" }
                  nav {
                      ul {
                          li { a href="/" { "Explore" } }
                          @if signed_in {
                              li { a href="/trips" { "My trips" } }
                          }
                      }
                  }

                  @if !signed_in {
                      a href="/login" class="text-base font-medium hover:text-rose-500" { "Login" }
                  }
              }
                main class="max-w-screen-lg mx-auto" {
                    (content)
                }
            }
        }
    }
}
