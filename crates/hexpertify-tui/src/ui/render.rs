//! Main render function for the TUI.

use chrono::Utc;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use serde_json::{Map, Value};

use hexpertify_components::{
    format_duration, DataTable, Footer, Header, InputDialog, InputField, MultiInput, Spinner,
    StatusIndicator, TableCell, TableColumn, Theme,
};
use hexpertify_core::{Field, RowRecord, SIDEBAR_TITLE};

use crate::state::{FormFocus, ProfileForm, ProfileStatus, UiState, View};

/// Split the screen into header, body and footer.
fn main_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Area the services table is drawn in for a given screen size.
pub fn services_table_area(area: Rect) -> Rect {
    let [_, body_area, _] = main_layout(area);
    body_area
}

/// Column descriptors for the services table.
pub fn services_columns() -> Vec<TableColumn<Map<String, Value>>> {
    vec![
        TableColumn::new("name", "Service", "name").flex(20),
        TableColumn::new("provider", "Provider", "provider").flex(12),
        TableColumn::new("rate", "Rate", "rate")
            .width(10)
            .cell_render(|row: &Map<String, Value>, column, _| match row.field(&column.key) {
                Some(rate) if rate.is_truthy() => TableCell::new(format!("${}/h", rate)),
                _ => TableCell::muted("on request"),
            }),
        TableColumn::new("remote", "Remote", "remote")
            .width(8)
            .cell_render(|row: &Map<String, Value>, column, _| match row.field(&column.key) {
                Some(remote) if remote.is_truthy() => TableCell::success("yes"),
                _ => TableCell::muted("no"),
            }),
    ]
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, state: &UiState) {
    let [header_area, body_area, footer_area] = main_layout(frame.area());

    render_header(frame, header_area, state);

    match state.current_view {
        View::Home => render_home(frame, body_area, state),
        View::Profile => render_profile(frame, body_area, state),
        View::Services => render_services(frame, body_area, state),
        View::About => render_static(
            frame,
            body_area,
            " About Us ",
            "Hexpertify connects people with experts who can help them ship.",
        ),
        View::Contact => render_static(
            frame,
            body_area,
            " Contact Us ",
            "Reach the team at hello@hexpertify.example.",
        ),
    }

    render_footer(frame, footer_area, state);

    if let Some(dialog) = &state.banner_dialog {
        InputDialog::new("Upload banner", "Path to banner image", &dialog.path)
            .submit_label("Upload")
            .error(dialog.error.as_deref())
            .busy(dialog.uploading)
            .render(frame);
    }
}

/// Render the header with navigation tabs.
fn render_header(frame: &mut Frame, area: Rect, state: &UiState) {
    let status = match &state.profile {
        ProfileStatus::Loading => StatusIndicator::warning("Loading"),
        ProfileStatus::Loaded(profile) => StatusIndicator::success(format!("@{}", profile.username)),
        ProfileStatus::Failed(_) => StatusIndicator::error("Offline"),
    };

    let tabs = View::all().iter().map(|v| v.label()).collect();

    Header::new(SIDEBAR_TITLE)
        .status(status)
        .tabs(tabs, state.current_view.index())
        .render(frame, area);
}

/// Render the footer with status message.
fn render_footer(frame: &mut Frame, area: Rect, state: &UiState) {
    let (status, is_error) = match (&state.last_error, &state.status_message) {
        (Some(error), _) => (error.as_str(), true),
        (None, Some(message)) => (message.as_str(), false),
        (None, None) => ("Ready", false),
    };

    let help = if state.banner_dialog.is_some() {
        " Enter: upload | Esc: close "
    } else if state.is_editing() {
        " Enter: save/add | Left/Right: pick skill | Del: remove | Tab: next field | Esc: done "
    } else {
        match state.current_view {
            View::Profile => " e: edit phone | s: edit skills | b: banner | r: reload | q: quit ",
            _ => " q: quit | Tab: next view | 1-5: switch view | r: reload ",
        }
    };

    Footer::new(help).status(status, is_error).render(frame, area);
}

fn render_home(frame: &mut Frame, area: Rect, state: &UiState) {
    let theme = Theme::default();
    let greeting = match &state.profile {
        ProfileStatus::Loaded(profile) => format!("  Welcome back, {}.", profile.name),
        _ => "  Welcome.".to_string(),
    };

    let services = state
        .services
        .as_ref()
        .map(|rows| format!("  {} services listed.", rows.len()))
        .unwrap_or_else(|| "  Services are loading.".to_string());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(greeting, theme.bold())),
        Line::from(""),
        Line::from(services),
        Line::from(Span::styled(
            "  Press 2 for your profile or 3 to browse services.",
            theme.muted_style(),
        )),
    ];

    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Home ")
                .border_style(theme.focused_border()),
        ),
        area,
    );
}

fn render_static(frame: &mut Frame, area: Rect, title: &str, body: &str) {
    let text = vec![Line::from(""), Line::from(format!("  {}", body))];
    frame.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn render_services(frame: &mut Frame, area: Rect, state: &UiState) {
    let columns = services_columns();
    DataTable::new(Some(&columns), state.services.as_deref())
        .title(" Services ")
        .hover(state.services_hover)
        .render(frame, area);
}

fn render_profile(frame: &mut Frame, area: Rect, state: &UiState) {
    let theme = Theme::default();

    let profile = match &state.profile {
        ProfileStatus::Loading => {
            Spinner::new("Loading profile...", state.tick).render(frame, area);
            return;
        }
        ProfileStatus::Failed(_) => {
            let message = Paragraph::new("Failed to load profile. Please try again later.")
                .style(theme.error_style())
                .alignment(ratatui::layout::Alignment::Center);
            let y = area.y + area.height / 2;
            frame.render_widget(message, Rect::new(area.x, y, area.width, area.height.min(1)));
            return;
        }
        ProfileStatus::Loaded(profile) => profile,
    };

    let Some(form) = &state.form else {
        return;
    };

    let [card_area, form_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Fill(1)]).areas(area);

    let updated = profile
        .updated_at
        .map(|at| {
            let age = (Utc::now() - at).num_seconds().max(0);
            format!("updated {} ago", format_duration(age))
        })
        .unwrap_or_else(|| "never updated".to_string());
    let banner = if profile.banner.is_some() {
        "banner set"
    } else {
        "no banner"
    };

    let card = vec![
        Line::from(Span::styled(
            profile.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("@{}", profile.username)),
        Line::from(Span::styled(
            format!("{} | {}", banner, updated),
            theme.muted_style(),
        )),
    ];
    frame.render_widget(
        Paragraph::new(card)
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" My Profile ")),
        card_area,
    );

    render_form(frame, form_area, form, &theme);
}

fn render_form(frame: &mut Frame, area: Rect, form: &ProfileForm, theme: &Theme) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let name = InputField::new(Field::Name.label(), &form.name)
        .disabled(true)
        .error(form.error(Field::Name));
    let username = InputField::new(Field::Username.label(), &form.username)
        .disabled(true)
        .error(form.error(Field::Username));
    let email = InputField::new(Field::Email.label(), &form.email)
        .disabled(true)
        .error(form.error(Field::Email));
    let phone = InputField::new(Field::PhoneNumber.label(), &form.phone)
        .focused(form.focus == FormFocus::Phone)
        .disabled(form.saving)
        .error(form.error(Field::PhoneNumber));

    let [name_area, username_area, _] = Layout::vertical([
        Constraint::Length(name.height()),
        Constraint::Length(username.height()),
        Constraint::Fill(1),
    ])
    .areas(left);
    name.render(frame, name_area);
    username.render(frame, username_area);

    let skills = MultiInput::new(&form.skills)
        .label("Skills")
        .placeholder("Type a skill...")
        .focused(form.focus == FormFocus::Skills)
        .theme(theme.clone());
    let [email_area, phone_area, skills_area, _] = Layout::vertical([
        Constraint::Length(email.height()),
        Constraint::Length(phone.height()),
        Constraint::Length(skills.height(right.width)),
        Constraint::Fill(1),
    ])
    .areas(right);
    email.render(frame, email_area);
    phone.render(frame, phone_area);
    skills.render(frame, skills_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexpertify_components::{TableBody, TableModel};
    use hexpertify_core::Fixture;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &UiState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(100)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|l| l.contains(needle))
    }

    #[test]
    fn test_services_columns_project_demo_rows() {
        let columns = services_columns();
        let rows = Fixture::demo().services;
        let model = DataTable::new(Some(&columns), Some(&rows)).project();

        let TableModel::Grid {
            header,
            body: TableBody::Rows(rows),
        } = model
        else {
            panic!("expected rows");
        };
        assert_eq!(header, vec!["Service", "Provider", "Rate", "Remote"]);
        let first: Vec<&str> = rows[0].iter().map(|c| c.content.as_str()).collect();
        assert_eq!(first, vec!["Code review", "ada", "$80/h", "yes"]);
        let third: Vec<&str> = rows[2].iter().map(|c| c.content.as_str()).collect();
        assert_eq!(third, vec!["Mentoring", "N/A", "on request", "yes"]);
    }

    #[test]
    fn test_services_view_before_load_shows_no_data() {
        let state = UiState {
            current_view: View::Services,
            ..UiState::default()
        };
        let lines = draw(&state);
        assert!(contains(&lines, "No data available"));
    }

    #[test]
    fn test_profile_view_states() {
        let mut state = UiState {
            current_view: View::Profile,
            ..UiState::default()
        };
        assert!(contains(&draw(&state), "Loading profile..."));

        state.profile = ProfileStatus::Failed("gone".into());
        assert!(contains(
            &draw(&state),
            "Failed to load profile. Please try again later."
        ));

        let profile = Fixture::demo().profile.unwrap();
        state.form = Some(ProfileForm::from_profile(&profile));
        state.profile = ProfileStatus::Loaded(profile);
        let lines = draw(&state);
        assert!(contains(&lines, "@ada"));
        assert!(contains(&lines, "Phone Number"));
        assert!(contains(&lines, "rust x"));
    }
}
