use super::db::Db;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::messages::Message;
use crate::libs::task::{normalize_tags, IdMatch, Task, TaskFilter, TaskPatch};
use crate::msg_debug;
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Row, Transaction};
use std::collections::BTreeSet;
use uuid::Uuid;

const INSERT_TASK: &str =
    "INSERT INTO tasks (id, title, urgency, importance, tags, folder, description) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_TASK: &str =
    "UPDATE tasks SET title = ?2, urgency = ?3, importance = ?4, tags = ?5, folder = ?6, description = ?7 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, urgency, importance, tags, folder, description FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY: &str = "ORDER BY urgency DESC, importance DESC, rowid";

/// Task persistence. Every method runs in its own transaction on `db`.
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(db: Db) -> Self {
        Tasks { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Validates `task`, gives it a fresh id and stores it.
    ///
    /// Returns the stored task, id included. A task that already carries an
    /// id is rejected, ids are never caller supplied.
    pub fn add(&self, task: &Task) -> TaskResult<Task> {
        if task.id.is_some() {
            return Err(TaskError::validation("task id is assigned on insert and cannot be supplied"));
        }

        let mut stored = task.clone();
        stored.tags = normalize_tags(&task.tags);
        stored.validate()?;
        stored.id = Some(Uuid::new_v4().simple().to_string());

        self.db.with_transaction(|tx| insert(tx, &stored))?;
        msg_debug!(Message::TaskAdded(stored.id.clone().unwrap_or_default()));
        Ok(stored)
    }

    /// Every task matching all populated fields of `filter`.
    ///
    /// Rows are read inside the transaction and handed back as an owned
    /// list, so the connection is already closed when the caller iterates.
    /// Each call queries the database again.
    pub fn search(&self, filter: &TaskFilter) -> TaskResult<Vec<Task>> {
        let (sql, values) = build_query(filter);
        msg_debug!(format!("search: {}", sql));

        self.db.with_read_transaction(|tx| {
            let mut stmt = tx.prepare(&sql)?;
            let tasks = stmt
                .query_map(params_from_iter(values.iter()), row_to_task)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(tasks)
        })
    }

    /// Overwrites the supplied fields of the task with exactly this id.
    pub fn edit(&self, id: &str, patch: &TaskPatch) -> TaskResult<Task> {
        let task = self.db.with_transaction(|tx| {
            let mut task = find_one(tx, id)?;
            patch.apply(&mut task);
            task.tags = normalize_tags(&task.tags);
            task.validate()?;
            update(tx, &task)?;
            Ok(task)
        })?;
        msg_debug!(Message::TaskEdited(id.to_string()));
        Ok(task)
    }

    /// Deletes the task with exactly this id and returns what was deleted.
    pub fn remove(&self, id: &str) -> TaskResult<Task> {
        let task = self.db.with_transaction(|tx| {
            let task = find_one(tx, id)?;
            tx.execute(DELETE_TASK, params![id])?;
            Ok(task)
        })?;
        msg_debug!(Message::TaskRemoved(id.to_string()));
        Ok(task)
    }

    pub fn purge_all(&self) -> TaskResult<usize> {
        self.db.purge_all()
    }

    pub fn drop_schema(&self) -> TaskResult<()> {
        self.db.drop_schema()
    }
}

fn insert(tx: &Transaction<'_>, task: &Task) -> TaskResult<()> {
    let tags = serde_json::to_string(&task.tags).map_err(TaskError::storage)?;
    tx.execute(
        INSERT_TASK,
        params![task.id, task.title, task.urgency, task.importance, tags, task.folder, task.description],
    )?;
    Ok(())
}

fn update(tx: &Transaction<'_>, task: &Task) -> TaskResult<()> {
    let tags = serde_json::to_string(&task.tags).map_err(TaskError::storage)?;
    tx.execute(
        UPDATE_TASK,
        params![task.id, task.title, task.urgency, task.importance, tags, task.folder, task.description],
    )?;
    Ok(())
}

/// Loads the single task with this exact id.
fn find_one(tx: &Transaction<'_>, id: &str) -> TaskResult<Task> {
    let mut stmt = tx.prepare(&format!("{} {}", SELECT_TASKS, WHERE_ID))?;
    let mut matches = stmt.query_map(params![id], row_to_task)?.collect::<Result<Vec<_>, _>>()?;

    match matches.len() {
        0 => Err(TaskError::NotFound(id.to_string())),
        1 => Ok(matches.remove(0)),
        count => Err(TaskError::AmbiguousId { id: id.to_string(), count }),
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let raw_tags: String = row.get(4)?;
    let tags: BTreeSet<String> =
        serde_json::from_str(&raw_tags).map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        urgency: row.get(2)?,
        importance: row.get(3)?,
        tags,
        folder: row.get(5)?,
        description: row.get(6)?,
    })
}

/// Placeholder for the next bound value.
fn bind(values: &mut Vec<Value>, value: Value) -> String {
    values.push(value);
    format!("?{}", values.len())
}

fn build_query(filter: &TaskFilter) -> (String, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    match &filter.id {
        Some(IdMatch::Exact(id)) => {
            let p = bind(&mut values, Value::Text(id.clone()));
            clauses.push(format!("id = {}", p));
        }
        Some(IdMatch::Contains(fragment)) => {
            let p = bind(&mut values, Value::Text(fragment.clone()));
            clauses.push(format!("instr(id, {}) > 0", p));
        }
        None => {}
    }

    // instr is case sensitive where LIKE is not.
    if let Some(title) = &filter.title {
        let p = bind(&mut values, Value::Text(title.clone()));
        clauses.push(format!("instr(title, {}) > 0", p));
    }
    if let Some(urgency) = filter.urgency {
        let p = bind(&mut values, Value::Integer(i64::from(urgency)));
        clauses.push(format!("urgency = {}", p));
    }
    if let Some(importance) = filter.importance {
        let p = bind(&mut values, Value::Integer(i64::from(importance)));
        clauses.push(format!("importance = {}", p));
    }

    let tags = normalize_tags(&filter.tags);
    if !tags.is_empty() {
        let placeholders: Vec<String> = tags.into_iter().map(|tag| bind(&mut values, Value::Text(tag))).collect();
        clauses.push(format!(
            "EXISTS (SELECT 1 FROM json_each(tasks.tags) WHERE json_each.value IN ({}))",
            placeholders.join(", ")
        ));
    }

    if let Some(folder) = &filter.folder {
        let p = bind(&mut values, Value::Text(folder.clone()));
        clauses.push(format!("folder = {}", p));
    }
    if let Some(description) = &filter.description {
        let p = bind(&mut values, Value::Text(description.clone()));
        clauses.push(format!("instr(description, {}) > 0", p));
    }

    let mut sql = SELECT_TASKS.to_string();
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push(' ');
    sql.push_str(ORDER_BY);

    (sql, values)
}
