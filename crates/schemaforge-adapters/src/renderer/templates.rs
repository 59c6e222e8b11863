//! Express + mysql2 source templates.
//!
//! Placeholders use `{{VARIABLE}}` and are filled by
//! [`RenderContext::render`](schemaforge_core::domain::RenderContext::render).
//! Resource-dependent fragments (queries, foreign-key checks, the request
//! body schema) are computed by the renderer and always end in a newline
//! when non-empty, so they can sit at the start of a line.

pub const ROUTE: &str = r#"const express = require('express');
const router = express.Router();
const {{RESOURCE_CAPITAL}}Controller = require('../controllers/{{RESOURCE}}.controller');
const authMiddleware = require('../middlewares/auth.middleware');
const logger = require('../middlewares/logger.middleware');

/**
 * @swagger
 * {{MOUNT_PATH}}:
 *   get:
 *     summary: Get all {{TABLE}}
 *     tags:
 *       - {{RESOURCE_CAPITAL}}s
 *     security:
 *       - bearerAuth: []
 *     responses:
 *       200:
 *         description: List of {{TABLE}}
 *       401:
 *         description: Not authenticated
 *   post:
 *     summary: Create new {{RESOURCE}}
 *     tags:
 *       - {{RESOURCE_CAPITAL}}s
 *     security:
 *       - bearerAuth: []
 *     requestBody:
 *       required: true
 *       content:
 *         application/json:
 *           schema:
 *             type: object
{{BODY_SCHEMA}} *     responses:
 *       201:
 *         description: {{RESOURCE_CAPITAL}} created
 *       500:
 *         description: Validation or server error
 */
router.get('/', authMiddleware, logger, {{RESOURCE_CAPITAL}}Controller.getAll);
router.post('/', authMiddleware, logger, {{RESOURCE_CAPITAL}}Controller.create);

/**
 * @swagger
 * {{MOUNT_PATH}}/{id}:
 *   get:
 *     summary: Get {{RESOURCE}} by ID
 *     tags:
 *       - {{RESOURCE_CAPITAL}}s
 *     security:
 *       - bearerAuth: []
 *     parameters:
 *       - in: path
 *         name: id
 *         required: true
 *         schema:
 *           type: integer
 *     responses:
 *       200:
 *         description: {{RESOURCE_CAPITAL}} found
 *       404:
 *         description: Not found
 *   put:
 *     summary: Update {{RESOURCE}}
 *     tags:
 *       - {{RESOURCE_CAPITAL}}s
 *     security:
 *       - bearerAuth: []
 *     parameters:
 *       - in: path
 *         name: id
 *         required: true
 *         schema:
 *           type: integer
 *     requestBody:
 *       required: true
 *       content:
 *         application/json:
 *           schema:
 *             type: object
{{BODY_SCHEMA}} *     responses:
 *       200:
 *         description: {{RESOURCE_CAPITAL}} updated
 *       404:
 *         description: Not found
 *   delete:
 *     summary: Delete {{RESOURCE}}
 *     tags:
 *       - {{RESOURCE_CAPITAL}}s
 *     security:
 *       - bearerAuth: []
 *     parameters:
 *       - in: path
 *         name: id
 *         required: true
 *         schema:
 *           type: integer
 *     responses:
 *       200:
 *         description: {{RESOURCE_CAPITAL}} deleted
 *       404:
 *         description: Not found
 */
router.get('/:id', authMiddleware, logger, {{RESOURCE_CAPITAL}}Controller.getById);
router.put('/:id', authMiddleware, logger, {{RESOURCE_CAPITAL}}Controller.update);
router.delete('/:id', authMiddleware, logger, {{RESOURCE_CAPITAL}}Controller.delete);

module.exports = router;
"#;

pub const MODEL: &str = r#"const pool = require('../config/db');

exports.findAll = async (userId = null) => {
  const connection = await pool.getConnection();
  try {
{{FIND_ALL}}    return rows;
  } finally {
    connection.release();
  }
};

exports.findById = async (id, userId = null) => {
  const connection = await pool.getConnection();
  try {
{{FIND_BY_ID}}    return rows.length > 0 ? rows[0] : null;
  } finally {
    connection.release();
  }
};

exports.create = async (data, userId = null) => {
  const connection = await pool.getConnection();
  try {
{{ASSIGN_USER_ID}}{{CREATE_CHECKS}}    const fields = Object.keys(data).join(', ');
    const placeholders = Object.keys(data).map(() => '?').join(', ');
    const values = Object.values(data);

    const [result] = await connection.query(
      `INSERT INTO {{TABLE}} (${fields}) VALUES (${placeholders})`,
      values
    );

    return { id: result.insertId, ...data };
  } finally {
    connection.release();
  }
};

exports.update = async (id, data, userId = null) => {
  const existing = await exports.findById(id, userId);
  if (!existing) return null;

  const connection = await pool.getConnection();
  try {
{{STRIP_USER_ID}}{{UPDATE_CHECKS}}    const keys = Object.keys(data);
    if (keys.length === 0) return existing;

    const fields = keys.map((k) => `${k} = ?`).join(', ');
    const values = [...Object.values(data), id];

    await connection.query(`UPDATE {{TABLE}} SET ${fields} WHERE id = ?`, values);

    return { ...existing, ...data };
  } finally {
    connection.release();
  }
};

exports.delete = async (id, userId = null) => {
  const existing = await exports.findById(id, userId);
  if (!existing) return null;

  const connection = await pool.getConnection();
  try {
{{DELETE}}    return existing;
  } finally {
    connection.release();
  }
};
"#;

pub const CONTROLLER: &str = r#"const {{RESOURCE_CAPITAL}} = require('../models/{{RESOURCE}}.model');

exports.getAll = async (req, res) => {
  try {
    const items = await {{RESOURCE_CAPITAL}}.findAll({{USER_ONLY}});
    res.json(items);
  } catch (err) {
    res.status(500).json({ message: 'Server error', error: err.message });
  }
};

exports.getById = async (req, res) => {
  try {
    const item = await {{RESOURCE_CAPITAL}}.findById(req.params.id{{USER_ARG}});
    if (!item) {
      return res.status(404).json({ message: '{{RESOURCE}} not found' });
    }
    res.json(item);
  } catch (err) {
    res.status(500).json({ message: 'Server error', error: err.message });
  }
};

exports.create = async (req, res) => {
  try {
    const newItem = await {{RESOURCE_CAPITAL}}.create(req.body{{USER_ARG}});
    res.status(201).json(newItem);
  } catch (err) {
    res.status(500).json({ message: 'Server error', error: err.message });
  }
};

exports.update = async (req, res) => {
  try {
    const updated = await {{RESOURCE_CAPITAL}}.update(req.params.id, req.body{{USER_ARG}});
    if (!updated) {
      return res.status(404).json({ message: '{{RESOURCE}} not found' });
    }
    res.json(updated);
  } catch (err) {
    res.status(500).json({ message: 'Server error', error: err.message });
  }
};

exports.delete = async (req, res) => {
  try {
    const item = await {{RESOURCE_CAPITAL}}.delete(req.params.id{{USER_ARG}});
    if (!item) {
      return res.status(404).json({ message: '{{RESOURCE}} not found' });
    }
    res.json({ message: '{{RESOURCE}} deleted', item });
  } catch (err) {
    res.status(500).json({ message: 'Server error', error: err.message });
  }
};
"#;
