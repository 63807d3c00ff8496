use data_loader::MovieRecord;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLESHEET: &str = "/static/style.css";

/// Browse page: free-text search plus a genre filter, both rendered
/// client-side from the JSON endpoints.
pub fn index_page() -> String {
    page(
        "Movie Finder",
        html! {
            header class="hero" {
                h1 { "Movie Finder" }
                p { "Search by title, genre, plot, or initials (try \"tdk\")." }
                nav { a href="/recommendation" { "Not sure? Take the quiz" } }
            }

            form id="search-form" class="search" {
                input id="query" name="query" type="search" placeholder="Search movies..." autocomplete="off";
                button type="submit" { "Search" }
            }

            form id="genre-form" class="search" {
                input id="genre" name="genre" type="text" placeholder="Filter by genre (e.g. Comedy)";
                button type="submit" { "Filter" }
            }

            section id="results" class="grid" {}

            script { (PreEscaped(CARD_SCRIPT)) (PreEscaped(INDEX_SCRIPT)) }
        },
    )
}

/// Questionnaire page; answers are posted as JSON to `/recommend_movies`.
pub fn recommendation_page() -> String {
    page(
        "What should I watch?",
        html! {
            header class="hero" {
                h1 { "What should I watch?" }
                nav { a href="/" { "Back to search" } }
            }

            form id="quiz" class="quiz" {
                fieldset {
                    legend { "How are you feeling?" }
                    (radio("mood", "happy", "Happy"))
                    (radio("mood", "neutral", "Neutral"))
                    (radio("mood", "sad", "Sad"))
                }

                fieldset {
                    legend { "What's the occasion?" }
                    (radio("occasion", "alone", "Watching alone"))
                    (radio("occasion", "free", "Free time with friends"))
                    (radio("occasion", "special", "Special someone"))
                }

                fieldset {
                    legend { "Pick up to three genres" }
                    @for genre in QUIZ_GENRES {
                        label {
                            input type="checkbox" name="genres" value=(genre.to_lowercase());
                            " " (genre)
                        }
                    }
                }

                fieldset {
                    legend { "Should it be suitable for all ages?" }
                    (radio("age_appropriateness", "yes", "Yes"))
                    (radio("age_appropriateness", "no", "No"))
                }

                fieldset {
                    legend { "How recent?" }
                    (radio("timeline", "5", "Last 5 years"))
                    (radio("timeline", "10", "Last 10 years"))
                    (radio("timeline", "15", "Last 15 years"))
                    (radio("timeline", "25", "Last 25 years"))
                    (radio("timeline", "very old", "Classics (25+ years)"))
                    (radio("timeline", "any", "Any time"))
                }

                button type="submit" { "Recommend" }
            }

            section id="results" class="grid" {}

            script { (PreEscaped(CARD_SCRIPT)) (PreEscaped(QUIZ_SCRIPT)) }
        },
    )
}

/// Detail page for one movie, or a "not found" notice when `movie` is None.
pub fn movie_detail_page(movie: Option<&MovieRecord>) -> String {
    match movie {
        Some(movie) => page(
            &movie.title,
            html! {
                div class="backdrop" style=(format!("background-image: url('{}')", movie.poster_backdrop_url)) {}
                article class="detail" {
                    img class="poster" src=(movie.poster_url) alt=(movie.title);
                    div {
                        h1 { (movie.title) }
                        p class="meta" {
                            @if let Some(year) = movie.release_year() {
                                (year) " · "
                            }
                            (movie.genre) " · " (movie.original_language.to_uppercase())
                        }
                        p class="rating" {
                            "★ " (format!("{:.1}", movie.vote_average))
                            " (" (movie.vote_count) " votes)"
                        }
                        p { (movie.overview) }
                        p class="meta" { "Popularity: " (format!("{:.1}", movie.popularity)) }
                        a href="/" { "Back to search" }
                    }
                }
            },
        ),
        None => page(
            "Movie not found",
            html! {
                article class="detail" {
                    h1 { "Movie not found" }
                    p { "We couldn't find that movie." }
                    a href="/" { "Back to search" }
                }
            },
        ),
    }
}

pub fn error_page(message: impl AsRef<str>) -> String {
    page(
        "Error",
        html! {
            article class="detail" {
                h1 { "Something went wrong" }
                p { (message.as_ref()) }
                a href="/" { "Back to search" }
            }
        },
    )
}

const QUIZ_GENRES: [&str; 10] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Drama",
    "Fantasy",
    "Horror",
    "Romance",
    "Science Fiction",
];

fn radio(name: &str, value: &str, label: &str) -> Markup {
    html! {
        label {
            input type="radio" name=(name) value=(value);
            " " (label)
        }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(STYLESHEET);
            }
            body {
                main { (body) }
            }
        }
    }
    .into_string()
}

const CARD_SCRIPT: &str = r#"
function renderMovies(movies) {
  const results = document.getElementById('results');
  results.innerHTML = '';
  if (movies.length === 0) {
    results.textContent = 'No movies found.';
    return;
  }
  for (const movie of movies) {
    const card = document.createElement('a');
    card.className = 'card';
    card.href = '/movie/' + movie.id;
    const img = document.createElement('img');
    img.src = movie.poster_url;
    img.alt = movie.title;
    const title = document.createElement('h3');
    title.textContent = movie.title;
    const meta = document.createElement('p');
    meta.textContent = (movie.release_date || '').slice(0, 4) + ' · ' + movie.genre;
    card.append(img, title, meta);
    results.append(card);
  }
}
"#;

const INDEX_SCRIPT: &str = r#"
async function search(query) {
  const response = await fetch('/recommend', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json', 'Accept': 'application/json' },
    body: JSON.stringify({ query }),
  });
  renderMovies(await response.json());
}

document.getElementById('search-form').addEventListener('submit', (event) => {
  event.preventDefault();
  search(document.getElementById('query').value);
});

document.getElementById('genre-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const genre = document.getElementById('genre').value;
  const url = genre ? '/movies?genre=' + encodeURIComponent(genre) : '/movies';
  const response = await fetch(url, { headers: { 'Accept': 'application/json' } });
  renderMovies((await response.json()).slice(0, 40));
});

search('');
"#;

const QUIZ_SCRIPT: &str = r#"
document.getElementById('quiz').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = new FormData(event.target);
  const genres = form.getAll('genres').slice(0, 3);
  const answers = {
    mood: form.get('mood') || '',
    occasion: form.get('occasion') || '',
    genres,
    age_appropriateness: form.get('age_appropriateness') || '',
    timeline: form.get('timeline') || '',
  };
  const response = await fetch('/recommend_movies', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json', 'Accept': 'application/json' },
    body: JSON.stringify(answers),
  });
  renderMovies(await response.json());
});
"#;
