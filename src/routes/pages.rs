// Page Handlers
//
// This module serves the HTML shell for each page route. The pages are
// deliberately thin: all data flows through the JSON API, so each shell
// is a static document whose scripts call `/api/*` after load.
//
// Navigation between these routes is steered by the route gate; by the
// time a handler here runs, the gate has already decided the visitor
// belongs on this page.

use axum::response::Html;

/// Landing page handler
///
/// GET / - public; doubles as the login screen
pub async fn landing_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Taskdeck</title>
    <link rel="stylesheet" href="/static/styles.css">
</head>
<body>
    <main class="card">
        <h1>Taskdeck</h1>
        <p>Sign in to your task list.</p>
        <form id="login-form">
            <input type="email" name="email" placeholder="Email" required>
            <input type="password" name="password" placeholder="Password" required>
            <button type="submit">Log in</button>
        </form>
        <p><a href="/signup">Need an account? Sign up</a></p>
        <p class="error" id="error" hidden></p>
    </main>
    <script src="/static/login.js"></script>
</body>
</html>
"#,
    )
}

/// Signup page handler
///
/// GET /signup - public
pub async fn signup_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Sign up - Taskdeck</title>
    <link rel="stylesheet" href="/static/styles.css">
</head>
<body>
    <main class="card">
        <h1>Create your account</h1>
        <form id="signup-form">
            <input type="text" name="name" placeholder="Name" required>
            <input type="email" name="email" placeholder="Email" required>
            <input type="password" name="password" placeholder="Password (8+ characters)" required>
            <button type="submit">Sign up</button>
        </form>
        <p><a href="/">Already registered? Log in</a></p>
        <p class="error" id="error" hidden></p>
    </main>
    <script src="/static/signup.js"></script>
</body>
</html>
"#,
    )
}

/// Dashboard page handler
///
/// GET /dashboard - protected; the gate sends anonymous visitors away
/// before this runs
pub async fn dashboard_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Dashboard - Taskdeck</title>
    <link rel="stylesheet" href="/static/styles.css">
</head>
<body>
    <header class="bar">
        <h1>Taskdeck</h1>
        <span id="whoami"></span>
        <button id="logout">Log out</button>
    </header>
    <main>
        <form id="new-task">
            <input type="text" name="title" placeholder="New task" required>
            <input type="text" name="category" placeholder="Category (optional)">
            <button type="submit">Add</button>
        </form>
        <ul id="tasks"></ul>
    </main>
    <script src="/static/dashboard.js"></script>
</body>
</html>
"#,
    )
}
