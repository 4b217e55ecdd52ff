pub fn tasks_fixture() -> &'static str {
    return r#"
## User Stories

- As a developer, I want to sign in with my work email so that my session is tied to my account.
- As an end user, I want to reset my password without contacting support.

## Engineering Tasks

### Frontend

- Build the login form with email and password fields.
- Show inline validation errors for empty or malformed input.

### Backend

- Add a `POST /sessions` endpoint that issues a signed cookie.
- Rate limit failed login attempts per account.

### Other

- Document the rollout plan for existing users.

## Risks

- Third-party identity provider outages block every sign in.
"#
    .trim();
}

pub fn history_fixture() -> &'static str {
    return r###"[
  {
    "id": "5d3c1f0a-8e2b",
    "timestamp": "2024-03-02T10:15:30.123Z",
    "goal": "Add login",
    "users": "Devs",
    "constraints": "",
    "template": "web",
    "risks": "",
    "result": "## Tasks\n- Build login form"
  },
  {
    "id": "0b9e77d2-41aa",
    "timestamp": "2024-03-01T08:00:00.000Z",
    "goal": "Offline sync",
    "users": "Field technicians",
    "constraints": "Must work offline for a full shift",
    "template": "mobile",
    "risks": "Conflicting edits",
    "result": "## Tasks\n- Queue writes locally"
  }
]"###;
}
